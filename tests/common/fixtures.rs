//! Test fixtures - reusable template constants for tests.

/// A class with one manual section holding a default body
pub const GETTER_TEMPLATE: &str = "<?php
class Foo {
  public function getName() {
    // BEGIN MANUAL SECTION getName
    // TODO
    // END MANUAL SECTION
  }
}
";

/// The default body of `GETTER_TEMPLATE`'s section
pub const GETTER_DEFAULT_BODY: &str = "    // TODO\n";

/// A hand-written replacement for the default body
pub const GETTER_EDITED_BODY: &str = "    return $x;\n";

/// A file with no manual sections
pub const FULLY_GENERATED: &str = "export const VERSION = 3;\nexport const NAME = \"stamped\";\n";

/// Markers that never close
pub const BROKEN_MARKERS: &str = "# BEGIN MANUAL SECTION setup\nrun()\n";
