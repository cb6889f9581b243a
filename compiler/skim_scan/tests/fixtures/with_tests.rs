pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_small_numbers() {
        assert_eq!(add(1, 2), 3);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn overflows() {
        let x = unsafe { std::hint::black_box(i32::MAX) };
        add(x, 1);
    }

    fn helper() -> i32 {
        7
    }
}
