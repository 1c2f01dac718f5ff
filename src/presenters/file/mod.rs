pub mod pgm;
pub mod raster;

use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;

/// Picks the file presenter matching the extension of `filepath`; anything
/// other than `.pgm` goes through the raster encoder.
pub fn presenter_for_path(filepath: &Path) -> Box<dyn FilePresenterPort> {
    let is_pgm = filepath
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"));

    if is_pgm {
        Box::new(pgm::PgmFilePresenter::new())
    } else {
        Box::new(raster::ImageFilePresenter::new())
    }
}
