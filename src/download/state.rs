//! Download state tracking.

/// Counters for one download run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadState {
    /// Items handed to the downloader.
    pub items: u64,
    /// Files fetched in this run.
    pub downloaded: u64,
    /// Bytes written in this run.
    pub bytes_written: u64,
    /// Files left alone because they were already present.
    pub already_present: u64,
    /// Present files whose size differs from the advertised one.
    pub size_mismatches: u64,
    /// Present files replaced because their size differed.
    pub replaced: u64,
    /// Asset slots without a URL.
    pub missing: u64,
}

impl DownloadState {
    /// Record a freshly downloaded file.
    pub fn record_download(&mut self, bytes: u64) {
        self.downloaded += 1;
        self.bytes_written += bytes;
    }

    /// Number of asset slots processed so far.
    pub fn slots_processed(&self) -> u64 {
        self.downloaded + self.already_present + self.missing
    }
}
