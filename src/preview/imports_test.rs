use super::*;

#[test]
fn default_and_named_imports() {
    let src = "import React, { useState } from 'react';\nimport { Button } from \"@/components/ui/button\";\n";
    assert_eq!(scan_imports(src), vec!["react", "@/components/ui/button"]);
}

#[test]
fn multiline_named_import() {
    let src = "import {\n  Card,\n  CardHeader,\n  CardTitle,\n} from '@/components/ui/card';\n";
    assert_eq!(scan_imports(src), vec!["@/components/ui/card"]);
}

#[test]
fn namespace_type_and_side_effect_imports() {
    let src = "import * as Icons from 'lucide-react';\nimport type { Props } from './types';\nimport './styles.css';\n";
    assert_eq!(scan_imports(src), vec!["lucide-react", "./types", "./styles.css"]);
}

#[test]
fn require_calls_and_reexports() {
    let src = "const x = require('clsx');\nexport { cn } from '@/lib/utils';\n";
    assert_eq!(scan_imports(src), vec!["clsx", "@/lib/utils"]);
}

#[test]
fn duplicates_keep_first_occurrence() {
    let src = "import { A } from 'a';\nimport { B } from 'b';\nimport { C } from 'a';\n";
    assert_eq!(scan_imports(src), vec!["a", "b"]);
}

#[test]
fn jsx_text_containing_from_is_not_an_import() {
    let src = "export default function Quote() {\n  return <p>Words from \"someone\"</p>;\n}\n";
    assert!(scan_imports(src).is_empty());
}

#[test]
fn source_without_imports() {
    assert!(scan_imports("export default function Hero(){ return <div>Hi</div>; }").is_empty());
}
