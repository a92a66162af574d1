use super::probe::probe_duration;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

/// Minimal PCM WAV: mono, 16-bit, `rate` Hz, `secs` seconds of silence.
fn silent_wav(rate: u32, secs: u32) -> Vec<u8> {
    let data_len = rate * secs * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // channels
    out.extend_from_slice(&rate.to_le_bytes());
    out.extend_from_slice(&(rate * 2).to_le_bytes()); // byte rate
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(44 + data_len as usize, 0);
    out
}

#[test]
fn probe_duration_reads_wav_length() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    fs::write(&path, silent_wav(8000, 2)).unwrap();

    let d = probe_duration(&path).unwrap();
    assert!(d >= Duration::from_millis(1900) && d <= Duration::from_millis(2100));
}

#[test]
fn probe_duration_is_none_for_garbage_and_missing_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    fs::write(&path, b"definitely not audio").unwrap();

    assert!(probe_duration(&path).is_none());
    assert!(probe_duration(&dir.path().join("missing.mp3")).is_none());
}
