/// Resource repositories
///
/// One repository per entity table. Each exclusively owns read/write access
/// to its table; writes report the affected-row count, which the services use
/// as their existence-check signal. No call spans a transaction.

mod drugs;
mod users;
mod vaccinations;

pub use drugs::DrugRepository;
pub use users::UserRepository;
pub use vaccinations::VaccinationRepository;
