#![no_main]

use std::io::{self, Read};

use libfuzzer_sys::fuzz_target;
use rollbuf::{WindowBuffer, WindowConfig};

/// Reader that hands out at most `step` bytes per call.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (u8, u8, u8, Vec<u8>)| {
    let (window, extra, step, data) = input;
    let window = window as usize + 1;
    let step = step as usize + 1;

    let config = WindowConfig::new(window + extra as usize, window).unwrap();
    let reader = Trickle { data: &data, step };
    let mut buf = WindowBuffer::from_reader(reader, config).unwrap();

    // Verify: first window + rolled bytes reproduce the input
    let mut out = match buf.get_window().unwrap() {
        Some(w) => w.to_vec(),
        None => Vec::new(),
    };
    // Verify: a short non-empty stream shrinks the window once
    if !data.is_empty() && data.len() < window {
        assert_eq!(out.len(), data.len());
        assert_eq!(buf.window_size(), data.len());
    }
    while let Some(byte) = buf.get_next().unwrap() {
        out.push(byte);
    }
    assert_eq!(out, data);

    // Verify: exhaustion is sticky and close is idempotent
    assert_eq!(buf.get_window().unwrap(), None);
    assert_eq!(buf.skip(10).unwrap(), 0);
    assert!(buf.close().is_ok());
    assert!(buf.close().is_ok());
});
