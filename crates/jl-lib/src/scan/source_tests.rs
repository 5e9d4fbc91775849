use super::source::CharSource;

#[test]
fn reads_bytes_then_none() {
    let mut source = CharSource::new(&b"ab"[..]);
    assert_eq!(source.read().unwrap(), Some(b'a'));
    assert_eq!(source.read().unwrap(), Some(b'b'));
    assert_eq!(source.read().unwrap(), None);
    assert_eq!(source.read().unwrap(), None);
}

#[test]
fn unread_byte_comes_back_first() {
    let mut source = CharSource::new(&b"ab"[..]);
    assert_eq!(source.read().unwrap(), Some(b'a'));
    source.unread(b'x');
    assert_eq!(source.read().unwrap(), Some(b'x'));
    assert_eq!(source.read().unwrap(), Some(b'b'));
}

#[test]
fn unread_works_at_end_of_stream() {
    let mut source = CharSource::new(&b""[..]);
    assert_eq!(source.read().unwrap(), None);
    source.unread(b'z');
    assert_eq!(source.read().unwrap(), Some(b'z'));
    assert_eq!(source.read().unwrap(), None);
}
