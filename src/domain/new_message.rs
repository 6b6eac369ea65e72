/// A message that passed presence checks and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub body: String,
    pub username: String,
}

impl NewMessage {
    pub fn new(body: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            username: username.into(),
        }
    }
}
