use std::path::Path;

use dotthz_container::container::ContainerOpener;
use dotthz_hdf5::Hdf5Opener;

use crate::{
    config::PreviewConfig,
    diagnostics::Diagnostics,
    document::{PreviewDocument, Visual},
    encode::encode_png,
    error::PreviewError,
    file_info::FileInfo,
    icon::{GenericFileIcon, IconProvider},
    summary::summarize,
    thumbnail::render_thumbnail_png,
};

/// Answers preview requests, one file per call.
///
/// Holds no per-request state, a single composer can serve concurrent requests
/// as long as the opener and icon provider can.
#[derive(Debug)]
pub struct PreviewComposer<'a, O, I> {
    opener: O,
    icons: I,
    config: PreviewConfig,
    diagnostics: Diagnostics<'a>,
}

impl<'a, O: ContainerOpener, I: IconProvider> PreviewComposer<'a, O, I> {
    pub fn new(opener: O, icons: I, config: PreviewConfig, diagnostics: Diagnostics<'a>) -> Self {
        Self {
            opener,
            icons,
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Compose the preview for `path`. Never fails, every problem ends in a fallback.
    pub fn compose(&self, path: &Path) -> PreviewDocument {
        let diagnostics = self.diagnostics;
        diagnostics.info(format_args!("Previewing {}", path.display()));
        let file = FileInfo::read(path, self.config.date_format());

        let (metadata, thumbnail) = match self.opener.open(path) {
            Ok(container) => {
                let metadata = summarize(&container, diagnostics);
                let thumbnail =
                    render_thumbnail_png(&container, self.config.thumbnail_size(), diagnostics);
                // The container is released here, before any fallback work
                (metadata, thumbnail)
            }
            Err(e) => {
                diagnostics.warn(format_args!("Failed to open {}: {e}", path.display()));
                (
                    self.config.metadata_placeholder().clone(),
                    Err(PreviewError::ContainerOpenFailed(e)),
                )
            }
        };

        let visual = match thumbnail {
            Ok(png) => {
                diagnostics.info(format_args!("Generated thumbnail for {}", path.display()));
                Visual::thumbnail(png, self.config.thumbnail_size())
            }
            Err(e) => {
                diagnostics.warn(format_args!(
                    "No thumbnail for {} ({e}), falling back to icon",
                    path.display()
                ));
                self.fallback_visual(path)
            }
        };

        PreviewDocument::new(
            file,
            visual,
            metadata,
            self.config.frame_width(),
            self.config.frame_height(),
        )
    }

    fn fallback_visual(&self, path: &Path) -> Visual {
        let size = self.config.thumbnail_size();
        let png = self
            .icons
            .icon_for(path, size)
            .and_then(|icon| encode_png(&icon, size).map_err(PreviewError::from));
        match png {
            Ok(png) => Visual::fallback_icon(png, size),
            Err(e) => {
                self.diagnostics
                    .warn(format_args!("No icon for {}: {e}", path.display()));
                Visual::missing(size)
            }
        }
    }
}

/// Preview an HDF5 file with the generic icon as fallback, logging to the global logger
pub fn preview_file(path: &Path, config: PreviewConfig) -> PreviewDocument {
    PreviewComposer::new(Hdf5Opener, GenericFileIcon, config, Diagnostics::global()).compose(path)
}
