#[test]
fn test_all_artifacts() {
    use crate::{decode, decode_bitwise};
    use std::fs;

    for target in ["round_trip", "decode"] {
        let dir = std::format!("./fuzz/artifacts/{}", target);
        if !fs::exists(&dir).unwrap_or(false) {
            continue;
        }
        for file in fs::read_dir(&dir).unwrap() {
            let path = file.unwrap().path();
            if !path.is_file() {
                continue;
            }
            let data = fs::read(path).unwrap();
            crate::round_trip(&data);
            /* decoding arbitrary bytes may fail, it just has to fail the same way twice */
            assert_eq!(decode(&data), decode_bitwise(&data));
        }
    }
}
