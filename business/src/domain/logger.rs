/// Logging port. The business layer never touches a logging backend directly;
/// infrastructure provides the implementation.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
