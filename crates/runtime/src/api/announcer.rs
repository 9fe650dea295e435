use serde_json::Value;

/// Speech output.
///
/// The tracker never formats prose itself: it hands over a translation key
/// and a token record. Plain `say` is used for names that need no template.
pub trait Announcer: Send {
    fn say(&self, text: &str, interrupt: bool);

    fn say_with_tokens(&self, key: &str, tokens: &Value, interrupt: bool);

    /// Template without tokens.
    fn say_key(&self, key: &str, interrupt: bool) {
        self.say_with_tokens(key, &Value::Null, interrupt);
    }
}
