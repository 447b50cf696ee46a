#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use rollbuf::{WindowBuffer, WindowConfig};

fuzz_target!(|input: (u8, u8, Vec<u16>, Vec<u8>)| {
    let (window, extra, skips, data) = input;
    let window = window as usize + 1;
    let config = WindowConfig::new(window + extra as usize, window).unwrap();

    let mut skipping = WindowBuffer::from_reader(Cursor::new(data.clone()), config).unwrap();
    let mut stepping = WindowBuffer::from_reader(Cursor::new(data), config).unwrap();

    // Verify: skip(n) behaves like n discarded get_next calls
    for count in skips {
        let count = count as usize;
        let skipped = skipping.skip(count).unwrap();
        let mut stepped = 0;
        while stepped < count && stepping.get_next().unwrap().is_some() {
            stepped += 1;
        }
        assert_eq!(skipped, stepped);
        assert_eq!(skipping.position(), stepping.position());
    }
    assert_eq!(skipping.get_next().unwrap(), stepping.get_next().unwrap());
});
