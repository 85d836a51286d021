//! Archival workflow: precondition validation, source-link resolution, and
//! the file materialization plan.
//!
//! Everything here is pure. The api layer feeds in the thesis's stored
//! artifact names and the staff member's multipart submission, gets back a
//! validated [`ArchivePlan`], performs the file I/O, and commits the record.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::naming::{archive_filename, file_ext};
use crate::storage::StorageLayout;
use crate::thesis::FileKind;
use crate::types::DbId;

/// A file uploaded alongside the archive action.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything the staff member submitted with the archive action.
#[derive(Debug, Default)]
pub struct ArchiveSubmission {
    pub course_id: DbId,
    pub publish_year: Option<i32>,
    pub code_link: Option<String>,
    pub text: Option<UploadedFile>,
    pub presentation: Option<UploadedFile>,
    pub supervisor_review: Option<UploadedFile>,
    pub reviewer_review: Option<UploadedFile>,
}

impl ArchiveSubmission {
    /// The uploaded file for a kind, if any.
    ///
    /// An upload with an empty filename is treated as absent (an empty file
    /// input submitted with the form).
    pub fn upload(&self, kind: FileKind) -> Option<&UploadedFile> {
        let upload = match kind {
            FileKind::Text => self.text.as_ref(),
            FileKind::Presentation => self.presentation.as_ref(),
            FileKind::SupervisorReview => self.supervisor_review.as_ref(),
            FileKind::ReviewerReview => self.reviewer_review.as_ref(),
        };
        upload.filter(|f| !f.filename.is_empty())
    }

    fn take_upload(&mut self, kind: FileKind) -> Option<UploadedFile> {
        let upload = match kind {
            FileKind::Text => self.text.take(),
            FileKind::Presentation => self.presentation.take(),
            FileKind::SupervisorReview => self.supervisor_review.take(),
            FileKind::ReviewerReview => self.reviewer_review.take(),
        };
        upload.filter(|f| !f.filename.is_empty())
    }
}

/// Names of the artifacts already in working storage for a thesis.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredArtifacts<'a> {
    pub text: Option<&'a str>,
    pub presentation: Option<&'a str>,
    pub supervisor_review: Option<&'a str>,
    pub reviewer_review: Option<&'a str>,
}

impl<'a> StoredArtifacts<'a> {
    /// The stored filename for a kind, if any.
    pub fn get(&self, kind: FileKind) -> Option<&'a str> {
        match kind {
            FileKind::Text => self.text,
            FileKind::Presentation => self.presentation,
            FileKind::SupervisorReview => self.supervisor_review,
            FileKind::ReviewerReview => self.reviewer_review,
        }
    }
}

/// Validate the archival preconditions.
///
/// Checks, in order: a course is selected, then each required artifact is
/// either already stored or freshly uploaded. The first failure
/// short-circuits with its own message; nothing is mutated.
pub fn validate_archive_input(
    stored: &StoredArtifacts<'_>,
    submission: &ArchiveSubmission,
) -> Result<(), CoreError> {
    if submission.course_id == 0 {
        return Err(CoreError::Validation(
            "Select a course (bachelor/master) before archiving".into(),
        ));
    }

    for kind in FileKind::ALL {
        if !kind.is_required() {
            continue;
        }
        if stored.get(kind).is_none() && submission.upload(kind).is_none() {
            return Err(CoreError::Validation(format!(
                "Upload the {} to move the work to the archive",
                kind.label()
            )));
        }
    }

    Ok(())
}

/// Resolve the archive record's source-code link.
///
/// Precedence: the thesis's existing code link wins if it contains `"http"`;
/// otherwise a submitted link containing `"http"` is used; otherwise the
/// reference stays unset. No further URL validation is performed.
pub fn resolve_source_link(current: Option<&str>, submitted: Option<&str>) -> Option<String> {
    if let Some(link) = current {
        if link.contains("http") {
            return Some(link.to_string());
        }
    }
    if let Some(link) = submitted {
        if !link.is_empty() && link.contains("http") {
            return Some(link.to_string());
        }
    }
    None
}

/// Where the bytes of one planned archive file come from.
#[derive(Debug)]
pub enum FileSource {
    /// Copy (never move) an existing working-storage file.
    CopyFrom(PathBuf),
    /// Write a freshly uploaded file directly into the archive folder.
    SaveUpload(Vec<u8>),
}

/// One file to materialize into archive storage.
#[derive(Debug)]
pub struct PlannedFile {
    pub kind: FileKind,
    pub source: FileSource,
    /// Bare filename recorded on the archive record.
    pub archive_name: String,
    /// Full destination path under the archive folder.
    pub dest: PathBuf,
}

/// The validated materialization plan for one archival action.
#[derive(Debug)]
pub struct ArchivePlan {
    pub files: Vec<PlannedFile>,
}

impl ArchivePlan {
    /// The planned archive filename for a kind, if that kind is present.
    pub fn archive_name(&self, kind: FileKind) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.archive_name.as_str())
    }
}

/// Build the materialization plan for a thesis.
///
/// For each artifact kind present (stored or uploaded), computes the
/// deterministic archive filename and destination path, bumping the
/// collision index while `taken` reports the destination as occupied.
/// Stored artifacts take precedence over uploads of the same kind, matching
/// the copy-over-save order of the workflow. Consumes the submission's
/// upload buffers.
pub fn build_archive_plan(
    layout: &StorageLayout,
    worktype_tag: &str,
    area: &str,
    stored: &StoredArtifacts<'_>,
    mut submission: ArchiveSubmission,
    taken: impl Fn(&Path) -> bool,
) -> ArchivePlan {
    let mut files = Vec::new();

    for kind in FileKind::ALL {
        let (source, source_name) = if let Some(name) = stored.get(kind) {
            (
                FileSource::CopyFrom(layout.working_path(kind, name)),
                name.to_string(),
            )
        } else if let Some(upload) = submission.take_upload(kind) {
            (FileSource::SaveUpload(upload.bytes), upload.filename)
        } else {
            continue;
        };

        let ext = file_ext(&source_name);
        let mut index = None;
        let (archive_name, dest) = loop {
            let candidate = archive_filename(kind, worktype_tag, area, index, ext);
            let dest = layout.archive_path(kind, &candidate);
            if !taken(&dest) {
                break (candidate, dest);
            }
            index = Some(index.map_or(1, |i: u32| i + 1));
        };

        files.push(PlannedFile {
            kind,
            source,
            archive_name,
            dest,
        });
    }

    ArchivePlan { files }
}
