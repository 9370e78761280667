use std::fs;
use std::path::Path;

use vernissage::data::{DataLoader, DataOrigin, DataSource, LoadError};
use vernissage::page::{ClickTarget, PageLayout};
use vernissage::portfolio::{Portfolio, Step};
use vernissage::view::{GridKind, Overlay};

const ARTISTS: &str = r#"{
  "artists": [
    {"id": "a1", "name": "Ada Lovelace", "bio": "Pioneer. More text.", "portrait": "p.jpg"}
  ]
}"#;

const EXHIBITIONS: &str = r#"{
  "exhibitions": [
    {"id": "e1", "title": "Venice Biennale 2009", "description": "Group show",
     "images": ["i1.jpg", "i2.jpg", "i3.jpg"]}
  ]
}"#;

fn write_catalogue(dir: &Path, artists: &str, exhibitions: &str) {
    fs::write(dir.join("artists.json"), artists).unwrap();
    fs::write(dir.join("exhibitions.json"), exhibitions).unwrap();
}

fn card(grid: GridKind, index: usize) -> ClickTarget {
    ClickTarget::Card { grid, index }
}

#[test]
fn test_load_from_directory_populates_both_grids() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path(), ARTISTS, EXHIBITIONS);

    let mut portfolio = Portfolio::new(PageLayout::default());
    let origin = portfolio.load(&DataSource::Directory(dir.path().to_path_buf()));
    assert_eq!(origin, DataOrigin::Source);

    let artists = portfolio.page().grid(GridKind::Artists).unwrap().cards();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].title, "Ada Lovelace");
    assert_eq!(artists[0].subtitle, "Pioneer");

    let exhibitions = portfolio.page().grid(GridKind::Exhibitions).unwrap().cards();
    assert_eq!(exhibitions[0].title, "Venice Biennale");
    assert_eq!(exhibitions[0].badge.as_deref(), Some("2009"));
}

#[test]
fn test_missing_resource_falls_back_to_built_in_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("artists.json"), ARTISTS).unwrap();

    let mut portfolio = Portfolio::new(PageLayout::default());
    let origin = portfolio.load(&DataSource::Directory(dir.path().to_path_buf()));

    assert_eq!(origin, DataOrigin::Fallback);
    assert!(portfolio.store().artist("a1").is_none(), "no partial success");
    assert_eq!(portfolio.store().artists().len(), 3);
    assert_eq!(portfolio.store().exhibitions().len(), 2);
}

#[test]
fn test_malformed_json_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path(), "{ not json", EXHIBITIONS);

    let mut portfolio = Portfolio::new(PageLayout::default());
    let origin = portfolio.load(&DataSource::Directory(dir.path().to_path_buf()));
    assert_eq!(origin, DataOrigin::Fallback);
}

#[test]
fn test_reload_replaces_cards_and_keeps_one_listener() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path(), ARTISTS, EXHIBITIONS);
    let source = DataSource::Directory(dir.path().to_path_buf());

    let mut portfolio = Portfolio::new(PageLayout::default());
    portfolio.load(&source);
    portfolio.load(&source);

    let grid = portfolio.page().grid(GridKind::Artists).unwrap();
    assert_eq!(grid.cards().len(), 1, "cards are replaced, not appended");
    assert_eq!(grid.listener_count(), 1);

    portfolio.click(card(GridKind::Artists, 0));
    assert_eq!(portfolio.page().overlays().len(), 1, "one click opens one modal");
}

#[test]
fn test_click_through_exhibition_carousel() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path(), ARTISTS, EXHIBITIONS);

    let mut portfolio = Portfolio::new(PageLayout::default());
    portfolio.load(&DataSource::Directory(dir.path().to_path_buf()));
    portfolio.click(card(GridKind::Exhibitions, 0));

    portfolio.click(ClickTarget::CarouselPrev);
    assert_eq!(portfolio.page().top_overlay().unwrap().image(), "i3.jpg");
    portfolio.click(ClickTarget::CarouselDot(1));
    assert_eq!(portfolio.page().top_overlay().unwrap().image(), "i2.jpg");
    portfolio.step_carousel(Step::Next);
    let Some(Overlay::Exhibition(panel)) = portfolio.page().top_overlay() else {
        panic!("exhibition overlay should be open");
    };
    assert_eq!(panel.carousel.active_dot(), Some(2));

    portfolio.click(ClickTarget::Panel);
    assert!(portfolio.page().has_overlay(), "clicks inside the panel are swallowed");
    portfolio.click(ClickTarget::Backdrop);
    assert!(!portfolio.page().has_overlay());
}

#[test]
fn test_background_loader_delivers_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path(), ARTISTS, EXHIBITIONS);

    let loader = DataLoader::spawn(DataSource::Directory(dir.path().to_path_buf())).unwrap();
    let data = loader.wait().unwrap();
    assert!(data.artists.contains("a1"));
    assert!(data.exhibitions.contains("e1"));
}

#[test]
fn test_background_loader_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DataLoader::spawn(DataSource::Directory(dir.path().join("absent"))).unwrap();
    assert!(matches!(loader.wait(), Err(LoadError::Io { .. })));
}
