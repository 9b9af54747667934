//! 音频模块：PCM 音频结果与 WAV 文件写出。
//!
//! The speech service always answers with 16-bit little-endian mono PCM at
//! 24 kHz. [`AudioResult`] carries those bytes together with the fixed
//! format, and [`write_wav`] frames them in a RIFF/WAVE container.

mod wav;

pub use wav::{write_wav, WAV_HEADER_LEN};

use bytes::Bytes;

pub const SAMPLE_RATE: u32 = 24_000;
pub const CHANNELS: u16 = 1;
pub const SAMPLE_WIDTH_BYTES: u16 = 2;

/// Raw PCM returned by one successful call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioResult {
    pcm: Bytes,
    sample_rate: u32,
    channels: u16,
    sample_width_bytes: u16,
}

impl AudioResult {
    /// Wraps bytes in the service's fixed output format.
    pub fn pcm16_mono(pcm: impl Into<Bytes>) -> Self {
        Self {
            pcm: pcm.into(),
            sample_rate: SAMPLE_RATE,
            channels: CHANNELS,
            sample_width_bytes: SAMPLE_WIDTH_BYTES,
        }
    }

    pub fn pcm(&self) -> &Bytes {
        &self.pcm
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_width_bytes(&self) -> u16 {
        self.sample_width_bytes
    }

    pub fn len(&self) -> usize {
        self.pcm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcm.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        let bytes_per_second =
            self.sample_rate as f64 * self.channels as f64 * self.sample_width_bytes as f64;
        self.pcm.len() as f64 / bytes_per_second
    }

    pub(crate) fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width_bytes * 8,
            sample_format: hound::SampleFormat::Int,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_of_audio() {
        let audio = AudioResult::pcm16_mono(vec![0u8; 48_000]);
        assert_eq!(audio.len(), 48_000);
        assert!((audio.duration_secs() - 1.0).abs() < f64::EPSILON);
        assert_eq!(audio.wav_spec().bits_per_sample, 16);
    }
}
