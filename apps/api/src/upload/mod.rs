// Resume file intake: validation and PDF text extraction.

pub mod pdf;
pub mod validation;
