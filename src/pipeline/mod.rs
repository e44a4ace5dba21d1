pub mod extraction;
pub mod structuring;
pub mod processor; // Upload orchestrator: bytes → text → fields
