//! Physical LED locations of the GMMK Pro ANSI board.
//!
//! The board's RGB controller addresses its 98 LEDs in a driver-defined
//! order that follows the wiring, not the key matrix. [`LedIndex`] names
//! every position; the discriminant is the driver index used when building
//! a color frame.

/// Total number of LEDs on the board, including the 16 side-glow LEDs
pub const LED_COUNT: usize = 98;

/// Driver index of every LED. The trailing comment is the physical matrix
/// or side-glow position.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedIndex {
    Esc,    // 0, k13
    Grave,  // 1, k16
    Tab,    // 2, k11
    Caps,   // 3, k21
    LShift, // 4, k00
    LCtrl,  // 5, k06
    F1,     // 6, k26
    Num1,   // 7, k17
    Q,      // 8, k10
    A,      // 9, k12
    Z,      // 10, k14
    LWin,   // 11, k90
    F2,     // 12, k36
    Num2,   // 13, k27
    W,      // 14, k20
    S,      // 15, k22
    X,      // 16, k24
    LAlt,   // 17, k93
    F3,     // 18, k31
    Num3,   // 19, k37
    E,      // 20, k30
    D,      // 21, k32
    C,      // 22, k34
    F4,     // 23, k33
    Num4,   // 24, k47
    R,      // 25, k40
    F,      // 26, k42
    V,      // 27, k44
    F5,     // 28, k07
    Num5,   // 29, k46
    T,      // 30, k41
    G,      // 31, k43
    B,      // 32, k45
    Space,  // 33, k94
    F6,     // 34, k63
    Num6,   // 35, k56
    Y,      // 36, k51
    H,      // 37, k53
    N,      // 38, k55
    F7,     // 39, k71
    Num7,   // 40, k57
    U,      // 41, k50
    J,      // 42, k52
    M,      // 43, k54
    F8,     // 44, k76
    Num8,   // 45, k67
    I,      // 46, k60
    K,      // 47, k62
    Comma,  // 48, k64
    RAlt,   // 49, k95
    F9,     // 50, ka6
    Num9,   // 51, k77
    O,      // 52, k70
    L,      // 53, k72
    Dot,    // 54, k74
    Fn,     // 55, k92
    F10,    // 56, ka7
    Num0,   // 57, k87
    P,      // 58, k80
    Semicolon, // 59, k82
    Slash,  // 60, k85
    F11,    // 61, ka3
    Minus,  // 62, k86
    LeftBracket, // 63, k81
    Quote,  // 64, k83
    RCtrl,  // 65, k04
    F12,    // 66, ka5
    L1,     // 67, l01
    R1,     // 68, l11
    Del,    // 69, k97, PrtSc position remapped to Delete
    L2,     // 70, l02
    R2,     // 71, l12
    Home,   // 72, k65, Del position remapped to Home
    L3,     // 73, l03
    R3,     // 74, l13
    PgUp,   // 75, k15
    L4,     // 76, l04
    R4,     // 77, l14
    Equal,  // 78, k66
    Right,  // 79, k05
    L5,     // 80, l05
    R5,     // 81, l15
    End,    // 82, k75
    L6,     // 83, l06
    R6,     // 84, l16
    Backspace, // 85, ka1
    PgDn,   // 86, k25
    L7,     // 87, l07
    R7,     // 88, l17
    RightBracket, // 89, k61
    RShift, // 90, k91
    L8,     // 91, l08
    R8,     // 92, l18
    Backslash, // 93, ka2
    Up,     // 94, k35
    Left,   // 95, k03
    Enter,  // 96, ka4
    Down,   // 97, k73
}

impl LedIndex {
    /// Position of this LED in a color frame
    pub const fn index(self) -> usize {
        self as usize
    }
}

use LedIndex::*;

pub const WASD: [LedIndex; 4] = [W, A, S, D];

pub const ARROWS: [LedIndex; 4] = [Left, Right, Up, Down];

pub const FUNCTION_ROW: [LedIndex; 14] =
    [Esc, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, Del];

pub const NUMBER_ROW: [LedIndex; 15] = [
    Grave, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9, Num0, Minus, Equal, Backspace,
    Home,
];

pub const LETTERS: [LedIndex; 26] = [
    Q, W, E, R, T, Y, U, I, O, P, A, S, D, F, G, H, J, K, L, Z, X, C, V, B, N, M,
];

pub const SIDE_LEFT: [LedIndex; 8] = [L1, L2, L3, L4, L5, L6, L7, L8];

pub const SIDE_RIGHT: [LedIndex; 8] = [R1, R2, R3, R4, R5, R6, R7, R8];
