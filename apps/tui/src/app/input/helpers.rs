pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Number keys pick categories in list order, with `0` standing for the tenth.
pub fn category_for_digit(digit: char) -> Option<cs_catalog::Category> {
    let value = digit.to_digit(10)? as usize;
    let index = if value == 0 { 9 } else { value - 1 };
    cs_catalog::Category::from_index(index)
}
