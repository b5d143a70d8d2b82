use fitalloc::{Allocator, Heap};

#[test]
fn is_usable_in_const_contexts() {
    const _HEAP: Heap<64> = Heap::new();
    static _ALLOCATOR: Allocator<64> = Allocator::new();
}

#[test]
fn default_instance_has_the_reference_geometry() {
    assert_eq!(fitalloc::HEAP.capacity(), fitalloc::HEAP_CAPACITY);
    assert_eq!(fitalloc::HEAP_CAPACITY % fitalloc::ALIGNMENT, 0);
    assert_eq!(fitalloc::HEADER_SIZE % fitalloc::ALIGNMENT, 0);
}

#[test]
#[should_panic(expected = "too small heap memory")]
fn minimum_capacity_is_enforced() {
    let _heap = Heap::<16>::new(); // panic here
}

#[test]
#[should_panic(expected = "multiple of 16")]
fn capacity_must_be_a_multiple_of_the_alignment_unit() {
    let _heap = Heap::<50>::new(); // panic here
}

#[test]
fn shim_serializes_concurrent_allocations() {
    static ALLOCATOR: Allocator<8192> = Allocator::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                for _ in 0..64 {
                    if let Some(ptr) = ALLOCATOR.allocate(16) {
                        ALLOCATOR.free(ptr.as_ptr());
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ALLOCATOR.alloc_count(), 0);
    assert!(ALLOCATOR.check_integrity());
}
