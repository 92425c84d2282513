use mockall::mock;
use ppcsim_core::common::Exception;
use ppcsim_core::soc::MemoryBus;

mock! {
    pub Bus {}
    impl MemoryBus for Bus {
        fn read_u32(&mut self, addr: u32) -> Result<u32, Exception>;
        fn read_u64(&mut self, addr: u32) -> Result<u64, Exception>;
        fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Exception>;
        fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), Exception>;
    }
}

/// A bus that fails the test on any access.
pub fn silent_bus() -> MockBus {
    MockBus::new()
}
