pub struct UserFields;

impl UserFields {
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";
}
