pub mod derivation;
