mod signature_normalizer;

pub use signature_normalizer::SignatureNormalizer;
