use crate::application::dto::{FormatRequest, FormatResponse};
use crate::component_formatting::domain::{DistroInfo, Ecosystem, Inventory, ManifestEntry};
use crate::component_formatting::services::{ComponentFormatter, EcosystemFilter};
use crate::ports::inbound::ComponentFormattingPort;
use crate::ports::outbound::{InventoryReader, ProgressReporter};
use crate::shared::Result;

/// FormatComponentsUseCase - Turns an inventory into manifest entries
///
/// # Type Parameters
/// * `IR` - InventoryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct FormatComponentsUseCase<IR, PR> {
    inventory_reader: IR,
    progress_reporter: PR,
}

impl<IR, PR> FormatComponentsUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    pub fn new(inventory_reader: IR, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            progress_reporter,
        }
    }

    /// Executes the formatting workflow
    ///
    /// Exclusions are validated before the inventory is touched so a typo in
    /// a tag fails fast.
    pub fn execute(&self, request: FormatRequest) -> Result<FormatResponse> {
        let filter = EcosystemFilter::new(&request.excluded_ecosystems)?;
        let mut inventory = self.load_inventory(&request)?;

        let distro = self.resolve_distro(&request, &inventory, &filter);
        let formatter = ComponentFormatter::new(distro);

        let mut response = FormatResponse {
            excluded_count: filter.excluded().map(|e| inventory.record_count(e)).sum(),
            ..FormatResponse::default()
        };
        for ecosystem in filter.excluded() {
            let count = inventory.record_count(ecosystem);
            if count > 0 {
                self.progress_reporter.report(&format!(
                    "⏭️  Excluding {} {} record(s)",
                    count, ecosystem
                ));
            }
        }

        let total: usize = filter.included().map(|e| inventory.record_count(e)).sum();
        let mut processed = 0;

        for ecosystem in filter.included() {
            let entries: Vec<Option<ManifestEntry>> = match ecosystem {
                Ecosystem::Manual => std::mem::take(&mut inventory.manual)
                    .into_iter()
                    .map(|record| formatter.manual(record))
                    .collect(),
                typed => inventory
                    .packages(typed)
                    .iter()
                    .map(|info| formatter.format(typed, info).map(ManifestEntry::from))
                    .collect(),
            };

            for entry in entries {
                processed += 1;
                self.progress_reporter
                    .report_progress(processed, total, Some(ecosystem.as_str()));

                match entry {
                    Some(entry) => {
                        response.entries.push(entry);
                        *response.counts_by_ecosystem.entry(ecosystem).or_insert(0) += 1;
                    }
                    None => response.skipped_count += 1,
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Formatted {} component(s), skipped {}",
            response.formatted_count(),
            response.skipped_count
        ));

        Ok(response)
    }

    fn load_inventory(&self, request: &FormatRequest) -> Result<Inventory> {
        self.progress_reporter.report(&format!(
            "📖 Loading inventory from: {}",
            request.inventory_path.display()
        ));

        let inventory = self
            .inventory_reader
            .read_inventory(&request.inventory_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} record(s)",
            inventory.total_records()
        ));

        Ok(inventory)
    }

    /// Request override wins over the inventory's own identity
    fn resolve_distro(
        &self,
        request: &FormatRequest,
        inventory: &Inventory,
        filter: &EcosystemFilter,
    ) -> Option<DistroInfo> {
        let distro = request
            .distro_override
            .clone()
            .or_else(|| inventory.distro.clone());

        if distro.is_none() && !inventory.linux.is_empty() && !filter.is_excluded(Ecosystem::Linux)
        {
            self.progress_reporter.report_error(
                "⚠️  Warning: linux packages present but no distro identity given; \
                 Distribution and Release will be omitted",
            );
        }

        distro
    }
}

impl<IR, PR> ComponentFormattingPort for FormatComponentsUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    fn format_components(&self, request: FormatRequest) -> Result<FormatResponse> {
        self.execute(request)
    }
}
