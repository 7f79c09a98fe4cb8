// SPDX-License-Identifier: MIT
//
// Bundle assembly — run the three builders, encode each part, and combine
// every page of every part into one PDF using `lopdf`.
//
// The combined document starts empty, so the page tree (/Pages with /Kids
// and /Count), the catalog, and the trailer /Root are constructed explicitly
// before the cloned pages are attached to them.

use kdv_core::{ApplicationRecord, Bundle, BundlePart, KdvError, Result};
use kdv_layout::HelveticaMetrics;
use lopdf::{dictionary, Document, Object};
use tracing::{debug, info, instrument, warn};

use crate::builders::{cover_letter, cv, justification};
use crate::encode::encode_document;

/// Assembles the three-part application bundle from a record.
///
/// The builders are independent and order-insensitive; parts and combined
/// pages always come out in the fixed order cover letter, justification, CV.
#[derive(Debug, Default)]
pub struct BundleAssembler {
    measurer: HelveticaMetrics,
}

impl BundleAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate all three documents and the combined bundle.
    ///
    /// Any encoding or merge failure aborts the whole assembly; there is no
    /// partial bundle.
    #[instrument(skip_all, fields(cv_entries = record.cv.len()))]
    pub fn assemble(&self, record: &ApplicationRecord) -> Result<Bundle> {
        let cover = cover_letter::build(record, &self.measurer);
        let statement = justification::build(record, &self.measurer);
        let resume = cv::build(record, &self.measurer);

        let parts = vec![
            BundlePart {
                name: "01_Anschreiben.pdf".to_string(),
                bytes: encode_document(&cover, "Antrag auf Kriegsdienstverweigerung")?,
            },
            BundlePart {
                name: "02_Gewissensbegruendung.pdf".to_string(),
                bytes: encode_document(&statement, "Persönliche Gewissensbegründung")?,
            },
            BundlePart {
                name: "03_Lebenslauf.pdf".to_string(),
                bytes: encode_document(&resume, "Tabellarischer Lebenslauf")?,
            },
        ];

        let part_bytes: Vec<&[u8]> = parts.iter().map(|p| p.bytes.as_slice()).collect();
        let bundle_bytes = merge_documents(&part_bytes)?;

        info!(
            parts = parts.len(),
            bundle_bytes = bundle_bytes.len(),
            "bundle assembled"
        );

        Ok(Bundle {
            bundle_bytes,
            parts,
        })
    }
}

/// Combine several PDFs into one, preserving document order and each
/// document's internal page order.
#[instrument(skip_all, fields(documents = parts.len()))]
pub fn merge_documents(parts: &[&[u8]]) -> Result<Vec<u8>> {
    let mut bundle = Document::with_version("1.5");
    let pages_id = bundle.new_object_id();
    let mut kids: Vec<Object> = Vec::new();

    for (index, bytes) in parts.iter().enumerate() {
        let part = Document::load_mem(bytes).map_err(|err| {
            KdvError::Assembly(format!("failed to load part #{}: {}", index + 1, err))
        })?;

        let part_pages = part.get_pages();
        let mut numbers: Vec<u32> = part_pages.keys().copied().collect();
        numbers.sort_unstable();

        for number in numbers {
            let page_object = part.get_object(part_pages[&number]).map_err(|err| {
                KdvError::Assembly(format!(
                    "cannot read page {} of part #{}: {}",
                    number,
                    index + 1,
                    err
                ))
            })?;

            let cloned = clone_object_graph(&part, &mut bundle, page_object);
            let page_id = bundle.add_object(cloned);
            if let Ok(Object::Dictionary(page_dict)) = bundle.get_object_mut(page_id) {
                page_dict.set("Parent", Object::Reference(pages_id));
            }
            kids.push(Object::Reference(page_id));
        }

        debug!(part = index + 1, pages = part_pages.len(), "part merged");
    }

    let count = kids.len() as i64;
    bundle.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = bundle.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    bundle.trailer.set("Root", Object::Reference(catalog_id));

    let mut output = Vec::new();
    bundle
        .save_to(&mut output)
        .map_err(|err| KdvError::Assembly(format!("failed to serialise bundle: {}", err)))?;

    Ok(output)
}

/// Deep-clone an object from `source` into `target`, resolving and cloning
/// every reference it reaches. `/Parent` entries are skipped — the caller
/// re-parents cloned pages into the target's page tree, and following them
/// would loop through the source page tree.
fn clone_object_graph(source: &Document, target: &mut Document, object: &Object) -> Object {
    match object {
        Object::Dictionary(dict) => {
            let mut new_dict = lopdf::Dictionary::new();
            for (key, value) in dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), clone_object_graph(source, target, value));
            }
            Object::Dictionary(new_dict)
        }
        Object::Array(items) => Object::Array(
            items
                .iter()
                .map(|item| clone_object_graph(source, target, item))
                .collect(),
        ),
        Object::Stream(stream) => {
            let mut new_dict = lopdf::Dictionary::new();
            for (key, value) in stream.dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), clone_object_graph(source, target, value));
            }
            Object::Stream(lopdf::Stream::new(new_dict, stream.content.clone()))
        }
        Object::Reference(ref_id) => match source.get_object(*ref_id) {
            Ok(referenced) => {
                let cloned = clone_object_graph(source, target, referenced);
                let new_id = target.add_object(cloned);
                Object::Reference(new_id)
            }
            Err(err) => {
                warn!(?ref_id, %err, "unresolvable reference replaced with Null");
                Object::Null
            }
        },
        other => other.clone(),
    }
}
