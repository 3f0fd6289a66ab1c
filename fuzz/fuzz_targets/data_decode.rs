#![no_main]
use libfuzzer_sys::fuzz_target;
use ndn_packet::{Data, DataReader, TlvEntity};

fuzz_target!(|data: &[u8]| {
    if let Ok(packet) = Data::wire_decode(data) {
        // Anything that decodes with a name must encode and decode again.
        if !packet.name().is_empty() {
            let wire = packet.wire_encode().unwrap();
            let again = Data::wire_decode(&wire).unwrap();
            assert_eq!(again.name(), packet.name());
            assert_eq!(again.signed_portion(), packet.signed_portion());
        }
    }
    for _ in DataReader::new(data) {}
});
