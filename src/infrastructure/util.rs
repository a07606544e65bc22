use crate::application::ports::util::IdGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
