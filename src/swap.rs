/// Exchanges two values through a temporary.
pub fn swap_with_temp<T: Copy>(a: &mut T, b: &mut T) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

/// Exchanges two values with one destructuring assignment. The right-hand tuple is built
/// from the old values before either side is rebound.
pub fn swap_simultaneous<T: Copy>(a: &mut T, b: &mut T) {
    (*a, *b) = (*b, *a);
}
