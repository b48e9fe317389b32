use crate::application::dto::{InventoryRequest, InventoryResponse, InventoryStats};
use crate::inventory::domain::{
    OverrideTable, ReportRow, RepositoryId, RepositoryLicense, Requirement, RequirementLine,
};
use crate::inventory::policies::SourceUrlPolicy;
use crate::inventory::services::{OverrideParser, RequirementParser};
use crate::ports::outbound::{
    InputReader, LicenseRepository, ManualEntriesReader, PackageRegistry, ProgressReporter,
};
use crate::shared::Result;
use std::path::Path;

/// GenerateInventoryUseCase - Core use case for building the license report
///
/// Drives the pipeline strictly in input order: overrides, manual entries,
/// manifest requirements, extra entries. Every lookup is a separate blocking
/// call; nothing is cached between rows. Any error aborts the whole run and
/// no rows are returned.
///
/// # Type Parameters
/// * `IR` - InputReader implementation
/// * `MR` - ManualEntriesReader implementation
/// * `REG` - PackageRegistry implementation
/// * `LREPO` - LicenseRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateInventoryUseCase<IR, MR, REG, LREPO, PR> {
    input_reader: IR,
    manual_entries_reader: MR,
    package_registry: REG,
    license_repository: LREPO,
    progress_reporter: PR,
    source_url_policy: SourceUrlPolicy,
}

impl<IR, MR, REG, LREPO, PR> GenerateInventoryUseCase<IR, MR, REG, LREPO, PR>
where
    IR: InputReader,
    MR: ManualEntriesReader,
    REG: PackageRegistry,
    LREPO: LicenseRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateInventoryUseCase with injected dependencies
    pub fn new(
        input_reader: IR,
        manual_entries_reader: MR,
        package_registry: REG,
        license_repository: LREPO,
        progress_reporter: PR,
        source_url_policy: SourceUrlPolicy,
    ) -> Self {
        Self {
            input_reader,
            manual_entries_reader,
            package_registry,
            license_repository,
            progress_reporter,
            source_url_policy,
        }
    }

    /// Executes the inventory use case
    ///
    /// # Returns
    /// InventoryResponse with manual rows, then requirement rows, then extra rows
    pub fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        self.build_inventory(request).inspect_err(|_| {
            self.progress_reporter
                .report_error("❌ Inventory aborted; no report was written");
        })
    }

    fn build_inventory(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let mut stats = InventoryStats::default();

        // Step 1: Overrides
        let overrides = self.load_overrides(&request.overrides_path)?;

        // Step 2: Manual entries pass through unchanged
        let mut rows = match request.manual_entries_path.as_deref() {
            Some(path) => self.load_manual_entries(path)?,
            None => Vec::new(),
        };
        stats.manual_rows = rows.len();

        // Step 3: Manifest requirements
        let requirement_rows =
            self.process_requirements(&request.requirements_path, &overrides, &mut stats)?;
        stats.requirement_rows = requirement_rows.len();
        rows.extend(requirement_rows);

        // Step 4: Extra entries
        if let Some(extras_path) = request.extras_path.as_deref() {
            let extra_rows = self.process_extras(extras_path, &mut stats)?;
            stats.extra_rows = extra_rows.len();
            rows.extend(extra_rows);
        }

        rows.retain(|row| !row.is_blank());

        self.progress_reporter.report_completion(&format!(
            "✅ Inventory complete: {} row(s) ({} manual, {} from requirements, {} extra)",
            rows.len(),
            stats.manual_rows,
            stats.requirement_rows,
            stats.extra_rows
        ));

        Ok(InventoryResponse::new(rows, stats))
    }

    fn load_overrides(&self, path: &Path) -> Result<OverrideTable> {
        self.progress_reporter
            .report(&format!("📖 Loading overrides from: {}", path.display()));

        let content = self.input_reader.read_input(path, "overrides file")?;
        let overrides = OverrideParser::parse(&content)?;

        self.progress_reporter
            .report(&format!("   - {} override(s)", overrides.len()));
        Ok(overrides)
    }

    fn load_manual_entries(&self, path: &Path) -> Result<Vec<ReportRow>> {
        self.progress_reporter
            .report(&format!("📋 Loading manual entries from: {}", path.display()));

        let rows = self.manual_entries_reader.read_manual_entries(path)?;

        self.progress_reporter
            .report(&format!("   - {} manual row(s)", rows.len()));
        Ok(rows)
    }

    /// Parses the manifest line by line and resolves each pinned requirement
    fn process_requirements(
        &self,
        path: &Path,
        overrides: &OverrideTable,
        stats: &mut InventoryStats,
    ) -> Result<Vec<ReportRow>> {
        self.progress_reporter
            .report(&format!("🔍 Resolving requirements from: {}", path.display()));

        let content = self.input_reader.read_input(path, "requirements file")?;
        let lines: Vec<&str> = content.lines().collect();
        let total = lines.len();
        let mut rows = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            log::info!("Parsing {}", line.trim());

            let requirement = match RequirementParser::parse(line)? {
                RequirementLine::Pinned(requirement) => requirement,
                RequirementLine::Editable(stripped) => {
                    self.progress_reporter
                        .report_warning(&format!("Skipping editable requirement: {}", stripped));
                    stats.skipped_editable += 1;
                    continue;
                }
                RequirementLine::Ignored => continue,
            };

            self.progress_reporter
                .report_progress(idx + 1, total, Some(requirement.name()));

            let row = self.resolve_requirement(&requirement, overrides, stats)?;
            rows.push(row);
        }

        Ok(rows)
    }

    fn resolve_requirement(
        &self,
        requirement: &Requirement,
        overrides: &OverrideTable,
        stats: &mut InventoryStats,
    ) -> Result<ReportRow> {
        let source_url = self.resolve_source_url(requirement, overrides)?;
        if source_url.is_none() {
            stats.unresolved_sources += 1;
        }

        let license = self.resolve_license(source_url.as_deref())?;
        if source_url.is_some() && license.is_none() {
            stats.unresolved_licenses += 1;
        }

        Ok(ReportRow::for_requirement(requirement, source_url, license))
    }

    /// Finds the source repository URL of a requirement.
    ///
    /// An override short-circuits the registry lookup. Otherwise the labeled
    /// project URLs from the registry are run through the source URL policy.
    fn resolve_source_url(
        &self,
        requirement: &Requirement,
        overrides: &OverrideTable,
    ) -> Result<Option<String>> {
        let package = requirement.package_name();
        if let Some(url) = overrides
            .get(package.as_str())
            .or_else(|| overrides.get(package.registry_name()))
        {
            return Ok(Some(url.to_string()));
        }

        let project_urls = self.package_registry.fetch_project_urls(package)?;

        let source_url = self.source_url_policy.select(&project_urls);
        if source_url.is_none() {
            self.progress_reporter.report_warning(&format!(
                "Couldn't find source URL for {} in {:?}",
                package, project_urls
            ));
        }
        Ok(source_url)
    }

    /// Looks up the detected license of the repository behind `source_url`.
    ///
    /// A missing URL, a URL without owner/repo, and a repository or license the
    /// platform does not know all yield `None`; other failures propagate.
    fn resolve_license(&self, source_url: Option<&str>) -> Result<Option<RepositoryLicense>> {
        let Some(source_url) = source_url else {
            return Ok(None);
        };

        let Some(repository) = RepositoryId::from_url(source_url)? else {
            self.progress_reporter.report_warning(&format!(
                "Couldn't derive owner/repo from source URL {}",
                source_url
            ));
            return Ok(None);
        };

        let license = self
            .license_repository
            .fetch_repository_license(&repository)?;
        if license.is_none() {
            self.progress_reporter
                .report_warning(&format!("No license found for repository {}", repository));
        }
        Ok(license)
    }

    fn process_extras(&self, path: &Path, stats: &mut InventoryStats) -> Result<Vec<ReportRow>> {
        self.progress_reporter
            .report(&format!("🔗 Resolving extra entries from: {}", path.display()));

        let content = self.input_reader.read_input(path, "extras file")?;
        let urls: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        let total = urls.len();
        let mut rows = Vec::with_capacity(total);

        for (idx, source_url) in urls.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(source_url));

            let license = self.resolve_license(Some(source_url))?;
            if license.is_none() {
                stats.unresolved_licenses += 1;
            }
            rows.push(ReportRow::for_extra(source_url.to_string(), license));
        }

        Ok(rows)
    }
}
