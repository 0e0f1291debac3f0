/// A positioned copy of one grid value, as handed out by neighborhood queries
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell<T> {
    pub x: i32,
    pub y: i32,
    pub data: T,
}

impl<T> Cell<T> {
    #[inline]
    pub fn new(x: i32, y: i32, data: T) -> Self {
        Self { x, y, data }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
