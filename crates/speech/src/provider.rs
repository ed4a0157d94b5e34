pub(crate) mod elevenlabs;
