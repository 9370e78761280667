//! Built-in catalogue used when the remote resources cannot be loaded.

use super::{Artist, Dataset, Exhibition};

fn artist(id: &str, name: &str, bio: &str, portrait: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        portrait: portrait.to_string(),
    }
}

fn exhibition(id: &str, title: &str, description: &str, images: &[&str]) -> Exhibition {
    Exhibition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        images: images.iter().map(ToString::to_string).collect(),
        year: None,
    }
}

/// The fallback dataset.
pub fn fallback_dataset() -> Dataset {
    Dataset::new(
        vec![
            artist(
                "kozin",
                "Vladimir Kozin",
                "Co-editor of the collective's publications. Works across text and print.",
                "images/kozin-portrait.jpg",
            ),
            artist(
                "motolyanets",
                "Semyon Motolyanets",
                "Performance artist. Stages long-form actions in public space.",
                "images/motolyanets-portrait.jpg",
            ),
            artist(
                "panin",
                "Igor Panin",
                "Book designer. Responsible for the look of the collective's catalogues.",
                "images/panin-portrait.jpg",
            ),
        ],
        vec![
            exhibition(
                "the-act",
                "THE ACT 2010",
                "A group exhibition of performance documentation.",
                &["images/the-act-1.jpg", "images/the-act-2.jpg"],
            ),
            exhibition(
                "venice-2009",
                "Venice Biennale 2009",
                "Participation in the collateral programme of the Biennale.",
                &["images/venice-1.jpg"],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_expected_records() {
        let data = fallback_dataset();
        assert_eq!(data.artists.len(), 3);
        assert_eq!(data.exhibitions.len(), 2);
        assert!(data.artists.contains("kozin"));
        assert!(data.exhibitions.contains("venice-2009"));
    }

    #[test]
    fn test_fallback_exhibitions_all_have_images() {
        let data = fallback_dataset();
        assert!(data.exhibitions.iter().all(|ex| !ex.images.is_empty()));
        assert!(data.validate().is_ok());
    }
}
