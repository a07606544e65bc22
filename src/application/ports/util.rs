// src/application/ports/util.rs

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
