use boxlabel_pdf::{BoxNumber, compose, qr_svg, strip_quotes, target_string};

#[test]
fn target_pairs_the_prefix_with_the_padded_number() {
    assert_eq!(target_string("http://x/", 1), "http://x/00001");
    assert_eq!(target_string("http://x/", 54321), "http://x/54321");
}

#[test]
fn surrounding_quotes_are_stripped_from_the_prefix() {
    assert_eq!(strip_quotes("'http://x/'"), "http://x/");
    assert_eq!(strip_quotes("\"http://x/\""), "http://x/");
    assert_eq!(strip_quotes("http://x/"), "http://x/");
}

#[test]
fn composed_labels_carry_the_caption_and_a_square_raster() {
    let number = BoxNumber {
        label: "BOX00001".to_string(),
        number: 1,
    };
    let label = compose(number, "http://x/").expect("compose");
    assert_eq!(label.caption, "BOX00001");
    assert_eq!(label.image.width(), label.image.height());
    assert!(label.image.width() > 0);
}

#[test]
fn svg_fragment_omits_the_xml_declaration() {
    let fragment = qr_svg("http://x/00001", false).expect("render svg");
    assert!(!fragment.contains("<?xml"));
    assert!(fragment.starts_with("<svg"));
}

#[test]
fn svg_document_keeps_the_xml_declaration_on_request() {
    let standalone = qr_svg("http://x/00001", true).expect("render svg");
    assert!(standalone.starts_with("<?xml"));
}
