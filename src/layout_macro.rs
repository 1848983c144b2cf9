//! Declarative macros for writing layer tables.

/// Create a normal key action: `k!(A)`
#[macro_export]
macro_rules! k {
    ($k:ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a key action with a modifier chord: `wm!(RightBracket, RCS)`
#[macro_export]
macro_rules! wm {
    ($k:ident, $m:expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::$k,
            $m,
        ))
    };
}

/// Create a raw key action: `a!(No)`, `a!(Transparent)`
#[macro_export]
macro_rules! a {
    ($a:ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Momentarily activate a layer while held: `mo!(Function)`
#[macro_export]
macro_rules! mo {
    ($l:ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($crate::layer::Layer::$l))
    };
}

/// Activate a layer and deactivate all other toggled layers: `to!(Gaming)`
#[macro_export]
macro_rules! to {
    ($l:ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggleOnly(
            $crate::layer::Layer::$l,
        ))
    };
}

/// Change the default layer: `df!(Base)`
#[macro_export]
macro_rules! df {
    ($l:ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::DefaultLayer(
            $crate::layer::Layer::$l,
        ))
    };
}

/// Collect rows of key actions into one layer table
#[macro_export]
macro_rules! layer {
    ([$([$($x:expr), +]), +]) => {
        [$([$($x), +]), +]
    };
}

/// Bind a rotary encoder: `encoder!(clockwise, counter_clockwise)`
#[macro_export]
macro_rules! encoder {
    ($cw:expr, $ccw:expr) => {
        $crate::action::EncoderAction::new($cw, $ccw)
    };
}
