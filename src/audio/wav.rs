//! WAV serialization with write-then-rename.

use super::AudioResult;
use crate::{Error, ErrorContext, Result};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

/// Size of the canonical PCM header (RIFF + `fmt ` + `data` chunk headers).
pub const WAV_HEADER_LEN: u64 = 44;

/// Writes `audio` as a WAV file at `path`.
///
/// The file is assembled in a temporary file next to `path` and renamed into
/// place only after the container is finalized, so `path` never holds a
/// partial file. Returns the number of bytes written.
pub fn write_wav(audio: &AudioResult, path: &Path) -> Result<u64> {
    if audio.len() % 2 != 0 {
        return Err(Error::unsupported_format_with_context(
            format!("{} bytes is not a whole number of 16-bit samples", audio.len()),
            ErrorContext::new().with_source("wav_writer"),
        ));
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io_write(path, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io_write(path, e))?;
    encode_into(audio, &mut tmp).map_err(|e| Error::io_write(path, hound_to_io(e)))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io_write(path, e))?;

    let written = tmp
        .as_file()
        .metadata()
        .map_err(|e| Error::io_write(path, e))?
        .len();
    tmp.persist(path).map_err(|e| Error::io_write(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = written, "wav written");
    Ok(written)
}

fn encode_into(audio: &AudioResult, tmp: &mut NamedTempFile) -> hound::Result<()> {
    let mut writer = hound::WavWriter::new(BufWriter::new(tmp.as_file_mut()), audio.wav_spec())?;
    {
        let mut samples = writer.get_i16_writer((audio.len() / 2) as u32);
        for frame in audio.pcm().chunks_exact(2) {
            samples.write_sample(i16::from_le_bytes([frame[0], frame[1]]));
        }
        samples.flush()?;
    }
    writer.finalize()
}

fn hound_to_io(err: hound::Error) -> std::io::Error {
    match err {
        hound::Error::IoError(e) => e,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(samples: usize) -> Vec<u8> {
        (0..samples)
            .flat_map(|i| ((i as i16).wrapping_mul(37)).to_le_bytes())
            .collect()
    }

    #[test]
    fn header_and_payload_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let pcm = ramp(1_000);

        let written = write_wav(&AudioResult::pcm16_mono(pcm.clone()), &path).unwrap();

        assert_eq!(written, WAV_HEADER_LEN + pcm.len() as u64);
        let raw = fs::read(&path).unwrap();
        assert_eq!(&raw[0..4], b"RIFF");
        assert_eq!(&raw[8..12], b"WAVE");
        assert_eq!(&raw[12..16], b"fmt ");
        assert_eq!(&raw[36..40], b"data");
        assert_eq!(&raw[44..], &pcm[..]);
    }

    #[test]
    fn reads_back_with_standard_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("voice.wav");
        let pcm = ramp(2_400);

        write_wav(&AudioResult::pcm16_mono(pcm.clone()), &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.bits_per_sample, 16);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        assert_eq!(bytes, pcm);
    }

    #[test]
    fn no_stray_files_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("only.wav");
        write_wav(&AudioResult::pcm16_mono(ramp(10)), &path).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn unwritable_destination_is_io_write() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();
        let path = blocker.join("out.wav");

        let err = write_wav(&AudioResult::pcm16_mono(ramp(10)), &path).unwrap_err();

        assert!(matches!(err, Error::IoWrite { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn odd_length_pcm_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.wav");
        let mut pcm = ramp(10);
        pcm.push(0x7f);

        let err = write_wav(&AudioResult::pcm16_mono(pcm), &path).unwrap_err();

        assert_eq!(err.kind(), crate::error_code::FailureKind::UnsupportedFormat);
        assert!(!path.exists());
    }
}
