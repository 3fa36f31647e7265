
use studymate_core::{FeatureType, NewStudySession};

pub(crate) fn new_session(feature_type: FeatureType, input: &str) -> NewStudySession {
    NewStudySession {
        feature_type,
        subject: None,
        input_text: input.to_owned(),
        output_text: format!("answer to {input}"),
    }
}
