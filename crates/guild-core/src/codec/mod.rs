pub mod hex_envelope;
