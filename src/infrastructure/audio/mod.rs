mod audio_decoder;
mod ffmpeg_extractor;
mod whisper_engine;

pub use audio_decoder::decode_audio_to_pcm;
pub use ffmpeg_extractor::FfmpegExtractor;
pub use whisper_engine::WhisperEngine;
