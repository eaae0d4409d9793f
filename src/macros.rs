/// Derives the by-value and by-reference binary operators of a type from
/// its `OpAssign<&T>` implementation.
macro_rules! forward_binops {
    ($t:ty; $($imp:ident, $method:ident, $assign_imp:ident, $assign:ident;)+) => {
        $(
            impl $assign_imp for $t {
                fn $assign(&mut self, other: $t) {
                    $assign_imp::$assign(self, &other)
                }
            }

            impl<'a, 'b> $imp<&'b $t> for &'a $t {
                type Output = $t;
                fn $method(self, other: &'b $t) -> $t {
                    let mut result = self.clone();
                    $assign_imp::$assign(&mut result, other);
                    result
                }
            }

            impl<'a> $imp<&'a $t> for $t {
                type Output = $t;
                fn $method(mut self, other: &'a $t) -> $t {
                    $assign_imp::$assign(&mut self, other);
                    self
                }
            }

            impl<'a> $imp<$t> for &'a $t {
                type Output = $t;
                fn $method(self, other: $t) -> $t {
                    $imp::$method(self, &other)
                }
            }

            impl $imp for $t {
                type Output = $t;
                fn $method(mut self, other: $t) -> $t {
                    $assign_imp::$assign(&mut self, &other);
                    self
                }
            }
        )+
    };
}
