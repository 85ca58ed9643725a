use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 255, 255, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_black_darkens_opaque_dst() {
    let dst = [200, 200, 200, 255];
    let src = [0, 0, 0, 128];
    assert_eq!(over(dst, src), [100, 100, 100, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}
