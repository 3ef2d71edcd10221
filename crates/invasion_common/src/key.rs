/// Keyboard keys the games care about; everything else maps to `None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Q,
    Space,
    Escape,
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}
