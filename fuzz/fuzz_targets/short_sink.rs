#![no_main]

use bitcursor::fuzz::short_sink::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
