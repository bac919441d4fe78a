//! In-memory PDF and DOCX builders for tests.

use std::io::Cursor;

use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });

    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).expect("pack docx");
    buf.into_inner()
}

/// One paragraph holding a plain run, a hyperlink and a tracked insertion.
pub fn docx_with_linked_paragraph(lead: &str, link_text: &str, inserted: &str) -> Vec<u8> {
    let paragraph = Paragraph::new()
        .add_run(Run::new().add_text(lead))
        .add_hyperlink(
            Hyperlink::new("https://example.com/portfolio", HyperlinkType::External)
                .add_run(Run::new().add_text(link_text)),
        )
        .add_insert(Insert::new(Run::new().add_text(inserted)));

    let mut buf = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(paragraph)
        .build()
        .pack(&mut buf)
        .expect("pack docx");
    buf.into_inner()
}

/// Operations that show `text` in the page font.
pub fn text_operations(text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 24.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// One page per entry; `None` produces a page with an empty content stream.
pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    let contents: Vec<Vec<Operation>> = pages
        .iter()
        .map(|page| page.map(text_operations).unwrap_or_default())
        .collect();
    pdf_with_page_operations(&contents)
}

/// One page per entry, each with the given content stream operations.
pub fn pdf_with_page_operations(pages: &[Vec<Operation>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content {
            operations: operations.clone(),
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save pdf");
    buf
}
