//! TwiML reply envelope
//!
//! Twilio delivers the reply to the user from the XML body of the webhook
//! response, so the handler answers inline instead of calling back out.

/// Builder for a TwiML messaging response
#[derive(Debug, Default)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the response
    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    /// Render the response as a TwiML document
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response>");
        for message in &self.messages {
            xml.push_str("<Message>");
            xml.push_str(&escape_xml(message));
            xml.push_str("</Message>");
        }
        xml.push_str("</Response>");
        xml
    }
}

/// Escape text for inclusion in XML character data
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message() {
        let xml = MessagingResponse::new().message("Hello").to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Hello</Message></Response>"
        );
    }

    #[test]
    fn test_empty_response() {
        let xml = MessagingResponse::new().to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response></Response>"
        );
    }

    #[test]
    fn test_escapes_markup() {
        let xml = MessagingResponse::new()
            .message("Fees < GYD 100 & rising, <b>really</b>")
            .to_xml();
        assert!(xml.contains("Fees &lt; GYD 100 &amp; rising, &lt;b&gt;really&lt;/b&gt;"));
        assert!(!xml.contains("<b>"));
    }

    #[test]
    fn test_multiline_body_preserved() {
        let xml = MessagingResponse::new()
            .message("Customer: A B\nAccount: 12345\nBalance: GYD 100")
            .to_xml();
        assert!(xml.contains("Customer: A B\nAccount: 12345\nBalance: GYD 100"));
    }
}
