use std::path::PathBuf;

/// Path for one test's generated sheet under tests/output/, cleared of
/// any previous run's file.
pub fn fresh_output(name: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output");
    std::fs::create_dir_all(&dir).expect("create tests/output");
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

/// Number of pages recorded in the document's page tree. The page tree
/// carries the only /Count entry these documents emit.
pub fn page_count(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf);
    let start = text.find("/Count ").expect("page tree count") + "/Count ".len();
    text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .expect("page count digits")
}

/// True when `needle` appears literally in the document bytes. Captions
/// land in uncompressed content streams, so they are visible here.
pub fn contains(pdf: &[u8], needle: &str) -> bool {
    pdf.windows(needle.len()).any(|w| w == needle.as_bytes())
}
