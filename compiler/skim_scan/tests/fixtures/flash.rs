// Enum variants of every shape.

enum FlashMessage {
    Success, // A unit variant
    Warning{ category: i32, message: String },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction<T = ()> {
    /// Towards the origin.
    Up = 1,
    #[allow(unused)]
    Down = 2,
    Custom(T),
}
