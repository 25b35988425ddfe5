/*!
# `RETURN`

## Purpose
Continues after the most recent `GOSUB`. Loops opened inside the
subroutine are abandoned.

*/
