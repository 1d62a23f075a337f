// src/controllers/osc.rs
// Receives tracker pose messages and routes them into the skeleton state.

use nannou_osc as osc;
use std::error::Error;

use crate::models::{BodyPart, SkeletonState};
use crate::utilities::decode_value_list;

pub struct OscController {
    receiver: osc::Receiver,
    namespace: String,
}

impl OscController {
    /// Binds a UDP receiver on `port`. A bind failure here is fatal to the
    /// app; the caller decides how to exit.
    pub fn new(port: u16, namespace: &str) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            receiver,
            namespace: namespace.to_string(),
        })
    }

    /// Drains every pending packet and applies pose updates to `skeleton`.
    /// Called once per frame; nothing here blocks.
    pub fn process_messages(&self, skeleton: &SkeletonState) {
        loop {
            match self.receiver.try_recv() {
                Ok(Some((packet, _addr))) => {
                    for message in packet.into_msgs() {
                        self.route_message(&message, skeleton);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    // Socket-level trouble with one datagram; keep going.
                    eprintln!("OSC receive error: {}", e);
                    break;
                }
            }
        }
    }

    /// Applies a single message to `skeleton`. Unknown topics are ignored;
    /// a malformed payload logs a warning and leaves the slot as it was.
    fn route_message(&self, message: &osc::Message, skeleton: &SkeletonState) {
        let part = match BodyPart::from_topic(&message.addr, &self.namespace) {
            Some(part) => part,
            None => return,
        };

        let payload = if let [osc::Type::String(payload), ..] = &message.args[..] {
            payload
        } else {
            eprintln!(
                "Ignoring {} message without a string payload",
                message.addr
            );
            return;
        };

        match decode_value_list(payload) {
            Ok(values) => skeleton.set(part, values),
            Err(e) => {
                eprintln!(
                    "Ignoring bad payload on {}: {} (payload {:?})",
                    message.addr, e, payload
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_without_socket() -> OscController {
        // Bind to an ephemeral port; the socket is unused by these tests.
        OscController::new(0, "notch").expect("Failed to bind test receiver")
    }

    fn message(addr: &str, args: Vec<osc::Type>) -> osc::Message {
        osc::Message {
            addr: addr.to_string(),
            args,
        }
    }

    #[test]
    fn test_pose_message_updates_matching_slot() {
        let controller = controller_without_socket();
        let skeleton = SkeletonState::new();
        let msg = message(
            "/notch/Head/all",
            vec![osc::Type::String("10,20,0,0,".to_string())],
        );

        controller.route_message(&msg, &skeleton);

        assert_eq!(skeleton.get(BodyPart::Head), vec![10.0, 20.0, 0.0, 0.0]);
        assert!(skeleton.get(BodyPart::ChestBottom).is_empty());
    }

    #[test]
    fn test_unknown_topic_is_ignored() {
        let controller = controller_without_socket();
        let skeleton = SkeletonState::new();
        let msg = message(
            "/notch/Pelvis/all",
            vec![osc::Type::String("1,2,".to_string())],
        );

        controller.route_message(&msg, &skeleton);

        for part in BodyPart::ALL {
            assert!(skeleton.get(part).is_empty());
        }
    }

    #[test]
    fn test_bad_payload_keeps_previous_value() {
        let controller = controller_without_socket();
        let skeleton = SkeletonState::new();
        skeleton.set(BodyPart::Head, vec![1.0, 2.0]);

        let msg = message(
            "/notch/Head/all",
            vec![osc::Type::String("not,numbers,".to_string())],
        );
        controller.route_message(&msg, &skeleton);

        assert_eq!(skeleton.get(BodyPart::Head), vec![1.0, 2.0]);
    }

    #[test]
    fn test_non_string_payload_keeps_previous_value() {
        let controller = controller_without_socket();
        let skeleton = SkeletonState::new();
        skeleton.set(BodyPart::Head, vec![1.0, 2.0]);

        let msg = message("/notch/Head/all", vec![osc::Type::Float(3.0)]);
        controller.route_message(&msg, &skeleton);

        assert_eq!(skeleton.get(BodyPart::Head), vec![1.0, 2.0]);
    }
}
