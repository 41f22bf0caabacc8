//! Unit tests for drag resolution and the drag controller.
