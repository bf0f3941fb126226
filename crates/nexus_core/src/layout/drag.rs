//! Drag payloads exchanged between a card's drag handle and its drop target.
//!
//! # Invariants
//! - The wire form is JSON `{"id": "...", "type": "..."}`; `type` may be
//!   absent and then reads as an empty tag.
//! - Parsing never fails loudly: unreadable input is `None`.

use log::debug;
use serde::{Deserialize, Serialize};

/// Serializable description of the widget being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: String,
    /// Type tag used to reject drops of a different kind.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl DragPayload {
    /// Encodes the payload for the host drag transfer channel.
    pub fn to_transfer_string(&self) -> String {
        // Two plain strings always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a transfer string; `None` for malformed JSON or a blank id.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(payload) if !payload.id.trim().is_empty() => Some(payload),
            Ok(_) => {
                debug!("event=drag_payload_parse module=layout status=rejected reason=blank_id");
                None
            }
            Err(err) => {
                debug!(
                    "event=drag_payload_parse module=layout status=rejected reason=malformed error={}",
                    err
                );
                None
            }
        }
    }
}

/// Builds the payload a drag source hands to the transfer channel.
pub fn begin_drag(widget_id: &str, widget_kind: &str) -> DragPayload {
    DragPayload {
        id: widget_id.to_string(),
        kind: widget_kind.to_string(),
    }
}

/// Tracks the widget currently lifted by the pointer, if any.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    lifted: Option<DragPayload>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag and returns the transfer string for the host channel.
    pub fn start(&mut self, widget_id: &str, widget_kind: &str) -> String {
        let payload = begin_drag(widget_id, widget_kind);
        let transfer = payload.to_transfer_string();
        self.lifted = Some(payload);
        transfer
    }

    /// Ends the drag, whether or not a drop happened.
    pub fn end(&mut self) {
        self.lifted = None;
    }

    pub fn lifted(&self) -> Option<&DragPayload> {
        self.lifted.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.lifted.is_some()
    }

    /// Whether `widget_id` is the widget being dragged.
    pub fn is_lifted(&self, widget_id: &str) -> bool {
        self.lifted
            .as_ref()
            .is_some_and(|payload| payload.id == widget_id)
    }
}
