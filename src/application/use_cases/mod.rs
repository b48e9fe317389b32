/// Use cases module containing application business logic orchestration
mod generate_inventory;

pub use generate_inventory::GenerateInventoryUseCase;
