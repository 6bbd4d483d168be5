use serde::{Deserialize, Serialize};

use crate::api;
use crate::error::Error;

/// A named mailbox: display name plus email address.
///
/// Formats itself as a single header value. No RFC 5322 validation
/// happens here; the API rejects bad addresses on its side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Address {
    /// Display name of the mailbox owner
    pub name: String,

    /// Email address
    pub email: String,
}

impl Address {
    pub fn new(name: &str, email: &str) -> Address {
        Address {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Header value form: `Name <user@host>`
    pub fn format(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// A single attachment, carried as base64 text.
///
/// `name` distinguishes "never set" from "set to empty": an unset name
/// falls back to `file` plus the sniffed extension, while an empty one
/// keeps just the extension.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attachment {
    /// Logical file name, without extension, if the caller has one
    pub name: Option<String>,

    /// Base64-encoded file content
    pub data: String,
}

impl Attachment {
    pub fn new() -> Attachment {
        Default::default()
    }

    pub fn with_name(name: &str) -> Attachment {
        Attachment {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Decode and sniff the content, then build the wire pair.
    ///
    /// The base64 text goes out exactly as it came in; decoding happens
    /// only to classify the content. Nothing is cached, so the sniff
    /// re-runs on every call.
    pub fn to_payload(&self) -> Result<api::AttachmentData, Error> {
        let raw = base64::decode(&self.data)?;

        let media_type = sniff_media_type(&raw);
        let extension = guess_extension(media_type);
        log::debug!("Attachment media type: {} ({:?})", media_type, extension);

        let name = match self.name {
            Some(ref name) => format!("{}{}", name, extension),
            None => format!("file{}", extension),
        };

        Ok(api::AttachmentData {
            name,
            data: self.data.clone(),
        })
    }
}

/// Magic-byte classification, with a generic fallback for content no
/// matcher recognizes.
fn sniff_media_type(data: &[u8]) -> &'static str {
    infer::get(data)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream")
}

/// Best-effort media type to `.ext` mapping. Empty when unresolvable.
fn guess_extension(media_type: &str) -> String {
    mime_guess::get_mime_extensions_str(media_type)
        .and_then(|extensions| extensions.first())
        .map(|extension| format!(".{}", extension))
        .unwrap_or_default()
}

/// An outbound message under construction.
///
/// Collects everything the send endpoint needs, then flattens into the
/// wire payload in one pass with `to_payload`. Construction never fails;
/// a missing required field surfaces at serialization time instead.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Email {
    /// Author of the message. Required by the API.
    pub sender: Option<Address>,

    /// Server account to send through, when it differs from `sender`
    pub sender_account: Option<Address>,

    /// Where replies should go instead of `sender`
    pub reply_to: Option<Address>,

    /// Primary recipients, in the order they were added
    pub to: Vec<Address>,

    /// Carbon-copy recipients
    pub cc: Vec<Address>,

    /// Blind carbon-copy recipients
    pub bcc: Vec<Address>,

    /// Subject line. Sent verbatim, even when never set.
    pub subject: Option<String>,

    /// Plaintext body, if any
    pub plain_body: Option<String>,

    /// HTML body, if any
    pub html_body: Option<String>,

    /// Attachments, in the order they were added
    pub attachments: Vec<Attachment>,

    /// Free-form tag shown in the Postal dashboard, handy for debugging
    pub tag: Option<String>,
}

impl Email {
    pub fn new() -> Email {
        Default::default()
    }

    /// Append a primary recipient
    pub fn add_recipient(&mut self, addressee: Address) {
        self.to.push(addressee);
    }

    /// Append a carbon-copy (CC) recipient
    pub fn add_cc(&mut self, addressee: Address) {
        self.cc.push(addressee);
    }

    /// Append a blind carbon-copy (BCC) recipient
    pub fn add_bcc(&mut self, addressee: Address) {
        self.bcc.push(addressee);
    }

    /// Append an attachment
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Flatten into the send-endpoint payload.
    ///
    /// Fails if `sender` was never set, or if any attachment carries
    /// malformed base64. Never emits a partial payload.
    pub fn to_payload(&self) -> Result<api::SendRequest, Error> {
        let sender = match self.sender {
            Some(ref sender) => sender,
            None => {
                log::error!("Cannot build a send request without a sender");
                return Err(Error::MissingField("sender".to_string()));
            }
        };

        let mut attachments = Vec::with_capacity(self.attachments.len());
        for attachment in &self.attachments {
            attachments.push(attachment.to_payload()?);
        }

        Ok(api::SendRequest {
            to: self.to.iter().map(|a| a.format()).collect(),
            cc: self.cc.iter().map(|a| a.format()).collect(),
            bcc: self.bcc.iter().map(|a| a.format()).collect(),
            from_: sender.format(),
            sender: self.sender_account.as_ref().map(|a| a.format()),
            reply_to: self.reply_to.as_ref().map(|a| a.format()),
            tag: self.tag.clone(),
            subject: self.subject.clone(),
            plain_body: self.plain_body.clone(),
            html_body: self.html_body.clone(),
            attachments,
        })
    }
}
