/// Partial update of a message. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageChanges {
    pub body: Option<String>,
    pub username: Option<String>,
}

impl MessageChanges {
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.username.is_none()
    }
}
