/// Join per-region top candidates in service order, one region per line
pub fn join_regions<S: AsRef<str>>(regions: &[S]) -> String {
    let mut text = String::new();
    for (i, region) in regions.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(region.as_ref());
    }
    text
}
