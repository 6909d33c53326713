pub mod storage_slot;
