/// Wire-level struct definitions for the Postal send endpoint.
use serde::{Deserialize, Serialize};

/// JSON body for `POST /api/v1/send/message`.
///
/// Unset optional keys are dropped from the payload entirely rather than
/// sent as null. `subject` is the one exception: the endpoint receives it
/// even when it was never set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendRequest {
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,

    /// Formatted `From` header value
    #[serde(rename = "from")]
    pub from_: String,

    /// Server account override, for sending on behalf of another account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    pub attachments: Vec<AttachmentData>,
}

/// A single attachment on the wire: resolved file name plus the caller's
/// base64 text, untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttachmentData {
    pub name: String,
    pub data: String,
}
